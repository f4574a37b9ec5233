// References:
// [1] https://en.wikipedia.org/wiki/Partition_type
// [2] util-linux, include/pt-mbr-partnames.h

const PTYPES: &[(u8, &str)] = &[
    (0x01, "FAT12"),
    (0x02, "XENIX root"),
    (0x03, "XENIX usr"),
    (0x04, "FAT16 <32M"),
    (0x05, "extended"),
    (0x06, "FAT16"),
    (0x07, "HPFS/NTFS/exFAT"),
    (0x08, "AIX"),
    (0x09, "AIX bootable"),
    (0x0a, "OS/2 boot manager"),
    (0x0b, "W95 FAT32"),
    (0x0c, "W95 FAT32 (LBA)"),
    (0x0e, "W95 FAT16 (LBA)"),
    (0x0f, "W95 extended (LBA)"),
    (0x10, "OPUS"),
    (0x11, "hidden FAT12"),
    (0x12, "Compaq diagnostics"),
    (0x14, "hidden FAT16 <32M"),
    (0x16, "hidden FAT16"),
    (0x17, "hidden HPFS/NTFS"),
    (0x1b, "hidden W95 FAT32"),
    (0x1c, "hidden W95 FAT32 (LBA)"),
    (0x1e, "hidden W95 FAT16 (LBA)"),
    (0x27, "hidden NTFS WinRE"),
    (0x39, "Plan 9"),
    (0x3c, "PartitionMagic recovery"),
    (0x42, "SFS"),
    (0x4d, "QNX4.x"),
    (0x4e, "QNX4.x 2nd part"),
    (0x4f, "QNX4.x 3rd part"),
    (0x63, "GNU HURD or SysV"),
    (0x80, "old Minix"),
    (0x81, "Minix / old Linux"),
    (0x82, "Linux swap / Solaris"),
    (0x83, "Linux"),
    (0x84, "OS/2 hidden C: drive"),
    (0x85, "Linux extended"),
    (0x86, "NTFS volume set"),
    (0x87, "NTFS volume set"),
    (0x88, "Linux plaintext"),
    (0x8e, "Linux LVM"),
    (0x93, "Amoeba"),
    (0x9f, "BSD/OS"),
    (0xa5, "FreeBSD"),
    (0xa6, "OpenBSD"),
    (0xa8, "Darwin UFS"),
    (0xa9, "NetBSD"),
    (0xab, "Darwin boot"),
    (0xaf, "HFS / HFS+"),
    (0xbe, "Solaris boot"),
    (0xbf, "Solaris"),
    (0xda, "non-FS data"),
    (0xde, "Dell utility"),
    (0xeb, "BeOS fs"),
    (0xee, "GPT"),
    (0xef, "EFI (FAT-12/16/32)"),
    (0xf0, "Linux/PA-RISC boot"),
    (0xfb, "VMware VMFS"),
    (0xfc, "VMware VMKCORE"),
    (0xfd, "Linux raid autodetect"),
    (0xfe, "LANstep"),
    (0xff, "BBT"),
];

pub fn name(typ: u8) -> &'static str {
    PTYPES
        .iter()
        .find(|(code, _)| *code == typ)
        .map_or("unknown", |&(_, name)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(name(0x83), "Linux");
        assert_eq!(name(0x0c), "W95 FAT32 (LBA)");
        assert_eq!(name(0xee), "GPT");
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(name(0x00), "unknown");
        assert_eq!(name(0x77), "unknown");
    }

    #[test]
    fn codes_are_unique() {
        for (i, (a, _)) in PTYPES.iter().enumerate() {
            assert!(PTYPES[i + 1..].iter().all(|(b, _)| a != b), "0x{:02x}", a);
        }
    }
}
