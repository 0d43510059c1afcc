use ricochet::walls::rotate;
use ricochet::{Direction, WallMask};

#[test]
fn rotate_zero_is_identity() {
    for m in 0u8..16 {
        assert_eq!(rotate(m, 0), m);
    }
}

#[test]
fn rotate_composes_modulo_four() {
    for m in 0u8..16 {
        for a in 0u8..4 {
            for b in 0u8..4 {
                assert_eq!(
                    rotate(rotate(m, a), b),
                    rotate(m, (a + b) % 4),
                    "m={m} a={a} b={b}"
                );
            }
        }
    }
}

#[test]
fn four_single_steps_restore_mask() {
    for m in 0u8..16 {
        assert_eq!(rotate(rotate(rotate(rotate(m, 1), 1), 1), 1), m);
        assert_eq!(rotate(rotate(m, 3), 1), m);
    }
}

#[test]
fn north_wall_turns_east() {
    assert_eq!(rotate(0b0001, 1), 0b0010);
    assert_eq!(WallMask::of(Direction::North).rotate(2), WallMask::of(Direction::South));
    assert_eq!(WallMask::of(Direction::West).rotate(1), WallMask::of(Direction::North));
}

#[test]
fn rotation_preserves_wall_count() {
    for m in 0u8..16 {
        for s in 0u8..4 {
            assert_eq!(rotate(m, s).count_ones(), m.count_ones());
        }
    }
}

#[test]
fn out_of_range_masks_rejected() {
    assert!(WallMask::new(16).is_none());
    assert!(WallMask::try_from(0xF0u8).is_err());
    let parsed: Result<WallMask, _> = serde_json::from_str("17");
    assert!(parsed.is_err());
    let ok: WallMask = serde_json::from_str("9").expect("valid mask");
    assert!(ok.has(Direction::North) && ok.has(Direction::West));
}
