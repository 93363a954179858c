use super::*;

#[test]
fn exact_entries_map_to_themselves() {
    for (k, rgb) in KELVIN_TABLE {
        assert_eq!(kelvin_to_rgb(k), rgb);
    }
}

#[test]
fn nearest_entry_wins() {
    assert_eq!(kelvin_to_rgb(5300.0), [1.0, 0.98, 0.95]);
    assert_eq!(kelvin_to_rgb(3500.0), [1.0, 0.82, 0.65]);
    assert_eq!(kelvin_to_rgb(1000.0), [1.0, 0.76, 0.54]);
    assert_eq!(kelvin_to_rgb(20000.0), [0.80, 0.90, 1.0]);
    // 5250 is equidistant from 5000 and 5500.
    assert_eq!(kelvin_to_rgb(5250.0), [1.0, 0.95, 0.90]);
}

#[test]
fn fill_tint_cools_and_stays_bounded() {
    let t = fill_tint([1.0, 1.0, 0.95]);
    assert_eq!(t[0], 0.9);
    assert_eq!(t[1], 0.95);
    assert_eq!(t[2], 1.0);
}
