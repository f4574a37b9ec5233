use crate::{mbr::Partition, ptype};

const SUFFIX: [&str; 5] = ["kb", "mb", "gb", "tb", "pb"];

/// Scales a sector count for display, dividing by 1024 while the value
/// exceeds 1024 and a larger suffix is left.
// The count is scaled as if it were kilobytes, so 2048 sectors (1 MiB) show
// as "2 mb".
pub fn printsz(mut sz: u64) -> String {
    let mut i = 0;
    while sz > 1024 && i + 1 < SUFFIX.len() {
        sz /= 1024;
        i += 1;
    }
    format!("{} {}", sz, SUFFIX[i])
}

pub fn partition_line(idx: usize, p: &Partition) -> String {
    format!(
        "{}{} ({}) {:<20} start: {:<10} size: {:<10} [{}]",
        idx,
        if p.is_active { '*' } else { ' ' },
        if p.is_primary { "pri" } else { "log" },
        ptype::name(p.type_code),
        p.start_sector,
        p.size_sectors,
        printsz(p.size_sectors)
    )
}
