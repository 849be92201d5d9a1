pub mod d400_analysis;
