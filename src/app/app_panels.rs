mod action_bar;
mod tile_grid;
mod top_bar;
