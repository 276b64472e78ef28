mod scan;
mod utils;
