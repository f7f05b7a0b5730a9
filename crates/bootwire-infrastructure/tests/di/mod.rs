//! Composition tests


mod builder_tests;
