pub mod confirm;
#[cfg(test)]
pub mod test_backend;
pub mod usecase;
