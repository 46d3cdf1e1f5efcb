pub mod search_dtos;
