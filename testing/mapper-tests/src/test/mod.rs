mod config;
mod entity;
mod report;
