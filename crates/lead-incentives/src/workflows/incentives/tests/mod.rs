mod calendar;
mod common;
mod evaluation;
