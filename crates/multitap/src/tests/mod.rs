
mod scenarios;
mod snapshot_preview;
