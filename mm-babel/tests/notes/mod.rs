//! Meeting-minutes format tests.

mod sections;
