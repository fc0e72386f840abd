pub mod result_matcher;

pub use result_matcher::ResultMatcher;
