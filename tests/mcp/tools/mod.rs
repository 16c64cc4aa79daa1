mod config;
mod detect;
