pub mod iconsmith;
