mod utils;
mod workflow;
