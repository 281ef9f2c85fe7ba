#![allow(unused_macros)]
use rstest_reuse::template;

// This creates a testing "template" to run a test once per demand formula

#[template]
#[rstest]
#[case::ratio(fare_solver::DemandForm::Ratio)]
#[case::offset(fare_solver::DemandForm::Offset)]
pub fn all_forms(#[case] form: fare_solver::DemandForm) -> () {}
