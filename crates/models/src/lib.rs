pub mod errors;
pub mod db;
pub mod menu_item;

#[cfg(test)]
mod tests;
