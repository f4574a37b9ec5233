// References:
// [1] https://en.wikipedia.org/wiki/Master_boot_record
// [2] https://en.wikipedia.org/wiki/Extended_boot_record

#![allow(dead_code)]

use scroll::{Pread, LE};

pub const BOOT_SIG: u16 = 0xAA55;
pub const BOOT_SIG_OFF: usize = 510;
pub const PTABLE_OFF: usize = 0x1BE;
pub const PENTRY_SZ: usize = 16;

pub const MBR_NREC: usize = 4;
pub const EBR_NREC: usize = 2;

pub const PTYPE_EXT: u8 = 0x05;
pub const PTYPE_EXT_LBA: u8 = 0x0F;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Pread)]
pub struct PartitionEntry {
    pub status: u8,
    pub first_chs: [u8; 3], // `unused`
    pub typ: u8,
    pub last_chs: [u8; 3], // `unused`
    pub lba: u32,          // relative to the mbr or to the first ebr
    pub nsecs: u32,
}

impl PartitionEntry {
    pub fn is_active(&self) -> bool {
        self.status & 0x80 != 0
    }

    pub fn is_empty(&self) -> bool {
        self.typ == 0
    }

    pub fn is_extended(&self) -> bool {
        self.typ == PTYPE_EXT || self.typ == PTYPE_EXT_LBA
    }
}

/// A decoded MBR or EBR sector. Only the first `nrec` slots are read: 4 for
/// the MBR, 2 for an EBR. A buffer shorter than a sector fails to decode.
#[derive(Debug)]
pub struct BootRec {
    pub entries: Vec<PartitionEntry>,
    pub boot_sig: u16,
}

impl BootRec {
    pub fn new(buf: &[u8], nrec: usize) -> Result<Self, scroll::Error> {
        let entries = (0..nrec)
            .map(|i| buf.pread_with(PTABLE_OFF + i * PENTRY_SZ, LE))
            .collect::<Result<Vec<PartitionEntry>, _>>()?;
        Ok(BootRec {
            entries,
            boot_sig: buf.pread_with(BOOT_SIG_OFF, LE)?,
        })
    }

    pub fn has_boot_sig(&self) -> bool {
        self.boot_sig == BOOT_SIG
    }
}
