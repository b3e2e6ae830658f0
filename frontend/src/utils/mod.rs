pub mod hr;
