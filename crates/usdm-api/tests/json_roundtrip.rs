//! JSON written by the builders reads back to an equal object graph.

use proptest::prelude::*;
use usdm_api::{BuildOptions, sample_wrapper};
use usdm_model::Wrapper;

fn with_enrollment(value: f64) -> Wrapper {
    let mut wrapper = sample_wrapper(BuildOptions::default()).unwrap();
    wrapper.study.versions[0].amendments[0].enrollments[0]
        .quantity
        .value = value;
    wrapper
}

fn reparse(wrapper: &Wrapper) -> Wrapper {
    let json = serde_json::to_string(wrapper).unwrap();
    serde_json::from_str(&json).unwrap()
}

#[test]
fn decimal_quantities_survive() {
    for value in [420_962.345_1, 977_632.671_4, 1_020_008.746_9, 254_684.211_1] {
        let wrapper = with_enrollment(value);
        let round = reparse(&wrapper);
        assert_eq!(
            round.study.versions[0].amendments[0].total_enrollment(),
            value
        );
        assert_eq!(round, wrapper);
    }
}

proptest! {
    #[test]
    fn finite_quantities_survive(
        value in prop::num::f64::NORMAL | prop::num::f64::SUBNORMAL | prop::num::f64::ZERO
    ) {
        let wrapper = with_enrollment(value);
        prop_assert_eq!(reparse(&wrapper), wrapper);
    }

    #[test]
    fn four_place_decimals_survive(scaled in 0u64..100_000_000_000) {
        let wrapper = with_enrollment(scaled as f64 / 10_000.0);
        prop_assert_eq!(reparse(&wrapper), wrapper);
    }
}
