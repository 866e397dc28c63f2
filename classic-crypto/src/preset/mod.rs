pub mod alphabets;
