pub mod convexity;
