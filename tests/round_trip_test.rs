//! Scatter/gather round trips through the register image.

use svcgen::{ArgumentRegisters, Catalog, Generator, RegisterWidth};

fn pattern(size: usize, seed: u8) -> Vec<u8> {
    (0..size).map(|i| seed.wrapping_add((i as u8).wrapping_mul(37)) | 1).collect()
}

#[test]
fn test_catalog_slots_round_trip() {
    let _ = env_logger::builder().is_test(true).try_init();

    let catalog = Catalog::horizon();
    let generator = Generator::default();

    for width in RegisterWidth::ALL {
        for entry in catalog.generated() {
            let (_, layout) = generator.plan(entry, width).unwrap();

            let mut slots: Vec<(&[usize], usize)> = Vec::new();
            if let Some(ret) = &layout.return_slot {
                slots.push((ret.registers.as_slice(), ret.ty.size));
            }
            for out in &layout.output_slots {
                slots.push((out.registers.as_slice(), out.ty.size));
            }

            let mut regs = ArgumentRegisters::new();
            let values: Vec<Vec<u8>> = slots
                .iter()
                .enumerate()
                .map(|(i, (_, size))| pattern(*size, i as u8 * 11))
                .collect();
            for ((dests, _), value) in slots.iter().zip(&values) {
                regs.scatter(width, dests, value);
            }
            // Every value survives the others being written.
            for ((dests, size), value) in slots.iter().zip(&values) {
                assert_eq!(&regs.gather(width, dests, *size), value, "{} {}", entry.name(), width);
            }
        }
    }
}

#[test]
fn test_narrow_split_u64() {
    let mut regs = ArgumentRegisters::new();
    let value = 0x1122_3344_5566_7788u64;
    regs.scatter(RegisterWidth::Narrow, &[1, 2], &value.to_le_bytes());
    assert_eq!(regs.slots()[1], 0x5566_7788);
    assert_eq!(regs.slots()[2], 0x1122_3344);

    let back = regs.gather(RegisterWidth::Narrow, &[1, 2], 8);
    assert_eq!(u64::from_le_bytes(back.try_into().unwrap()), value);
}

#[test]
fn test_gather_truncates_to_target() {
    let regs = ArgumentRegisters::from_slots([0xaabb_ccdd_eeff_0011, 0, 0, 0, 0, 0, 0, 0]);
    // A bool read from a wide register keeps only its first byte.
    assert_eq!(regs.gather(RegisterWidth::Wide, &[0], 1), vec![0x11]);
    // A 16-byte struct read from one narrow register is zero padded.
    let wide = regs.gather(RegisterWidth::Narrow, &[0], 16);
    assert_eq!(&wide[..4], &[0x11, 0x00, 0xff, 0xee]);
    assert!(wide[4..].iter().all(|&b| b == 0));
}
