pub mod u501_edit_constants;
