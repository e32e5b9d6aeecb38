pub mod errors;
pub mod db;
pub mod contact_submission;

#[cfg(test)]
mod tests;
