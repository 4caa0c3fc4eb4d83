/// Counter demo tests.
mod counter;
/// Form demo tests.
mod form;
/// Gallery demo tests.
mod gallery;
