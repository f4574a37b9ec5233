use std::{
    fs::File,
    io::{self, Read, Seek, SeekFrom},
    path::Path,
};

pub const SEC_SZ: usize = 512;

pub type Sec = [u8; SEC_SZ];

pub trait SectorReader {
    /// Reads exactly one 512-byte sector. A short read is an error.
    fn read_sector(&mut self, sec_no: u64) -> io::Result<Sec>;
}

pub struct BlkDevice<D: Read + Seek> {
    device: D,
}

impl BlkDevice<File> {
    pub fn open(name: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::options()
            .create(false)
            .write(false)
            .truncate(false)
            .read(true)
            .open(name)?;
        Ok(BlkDevice::new(file))
    }
}

impl<D: Read + Seek> BlkDevice<D> {
    pub fn new(device: D) -> Self {
        BlkDevice { device }
    }
}

impl<D: Read + Seek> SectorReader for BlkDevice<D> {
    fn read_sector(&mut self, sec_no: u64) -> io::Result<Sec> {
        let mut buf: Sec = [0u8; SEC_SZ];
        let offset = sec_no
            .checked_mul(SEC_SZ as u64)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "sector out of range"))?;
        self.device.seek(SeekFrom::Start(offset))?;
        self.device.read_exact(&mut buf)?;
        Ok(buf)
    }
}
