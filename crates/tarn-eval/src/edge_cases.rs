//! Edge case tests for tarn-eval
//!
//! Exercises the corners of the control-flow protocol: sentinel values
//! crossing block and call boundaries, secondary errors, and the
//! null/zero truthiness seams.
