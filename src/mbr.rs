use std::{collections::BTreeSet, io};

use tracing::{debug, trace, warn};

use crate::{
    device::SectorReader,
    layout::mbr::{BootRec, EBR_NREC, MBR_NREC},
};

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("failed to read sector {sector}: {source}")]
    ReadFailed { sector: u64, source: io::Error },
    #[error("invalid/corrupted partition table, sector {sector} has no magic (found 0x{found:04X})")]
    BadSignature { sector: u64, found: u16 },
    #[error("partition chain loops back to sector {0}")]
    ChainLoop(u64),
    #[error("scroll read failed")]
    Decode(#[from] scroll::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub start_sector: u64,
    pub size_sectors: u64,
    pub type_code: u8,
    pub is_active: bool,
    pub is_primary: bool,
}

/// Where the walk currently stands in the MBR/EBR chain.
struct Walk {
    sec_no: u64,
    // every EBR-relative lba is added to the first EBR's sector, not to the
    // sector of the EBR holding it
    first_ebr: Option<u64>,
    num_bootrec: u32,
    visited: BTreeSet<u64>,
}

impl Walk {
    fn new() -> Self {
        Walk {
            sec_no: 0,
            first_ebr: None,
            num_bootrec: 0,
            visited: BTreeSet::new(),
        }
    }

    fn base(&self) -> u64 {
        self.first_ebr.unwrap_or(0)
    }

    fn is_mbr(&self) -> bool {
        self.sec_no == 0
    }
}

/// Enumerates the partitions in the MBR at sector 0 and in its EBR chain.
///
/// Primary partitions come first in slot order, then the logical ones in
/// chain order. Any read error or missing boot signature discards
/// everything found so far.
pub fn walk<R: SectorReader + ?Sized>(reader: &mut R) -> Result<Vec<Partition>, TableError> {
    let mut st = Walk::new();
    let mut parts = vec![];

    loop {
        if !st.is_mbr() && st.first_ebr.is_none() {
            st.first_ebr = Some(st.sec_no);
        }
        if !st.visited.insert(st.sec_no) {
            warn!("sector {} already visited", st.sec_no);
            return Err(TableError::ChainLoop(st.sec_no));
        }

        let sec = reader
            .read_sector(st.sec_no)
            .map_err(|source| TableError::ReadFailed {
                sector: st.sec_no,
                source,
            })?;
        let is_mbr = st.is_mbr();
        let rec = BootRec::new(&sec, if is_mbr { MBR_NREC } else { EBR_NREC })?;
        if !rec.has_boot_sig() {
            warn!(
                "sector {} has boot signature 0x{:04X}",
                st.sec_no, rec.boot_sig
            );
            return Err(TableError::BadSignature {
                sector: st.sec_no,
                found: rec.boot_sig,
            });
        }
        debug!(
            "boot record #{} at sector {} ({})",
            st.num_bootrec,
            st.sec_no,
            if is_mbr { "mbr" } else { "ebr" }
        );

        let mut next = 0;
        for (i, en) in rec.entries.iter().enumerate() {
            // ignore empty slots in the MBR, an empty slot ends an EBR chain
            if en.is_empty() {
                if st.num_bootrec > 0 {
                    trace!("sector {} slot {}: end of chain", st.sec_no, i);
                    next = 0;
                    break;
                }
                trace!("sector {} slot {}: empty", st.sec_no, i);
                continue;
            }

            if en.is_extended() {
                next = st.base() + en.lba as u64;
                trace!(
                    "sector {} slot {}: extended (0x{:02X}), next boot record at {}",
                    st.sec_no,
                    i,
                    en.typ,
                    next
                );
                continue;
            }

            let part = Partition {
                start_sector: st.base() + en.lba as u64,
                size_sectors: en.nsecs as u64,
                type_code: en.typ,
                is_active: en.is_active(),
                is_primary: is_mbr,
            };
            debug!("sector {} slot {}: {:?}", st.sec_no, i, part);
            parts.push(part);
        }

        st.num_bootrec += 1;
        if next == 0 {
            break;
        }
        st.sec_no = next;
    }

    Ok(parts)
}
