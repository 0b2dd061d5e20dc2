pub mod wordlists;
