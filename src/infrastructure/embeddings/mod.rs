pub mod word_table;
