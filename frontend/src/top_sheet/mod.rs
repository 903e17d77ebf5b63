pub mod material_top_sheet;
