mod dasha_tests;
mod nakshatra_tests;
mod varga_tests;
mod yoga_tests;
