mod canvas;
mod panels;
