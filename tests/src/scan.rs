mod integration;
mod processes;
