mod mouse;
mod navigation;
mod open_close;
