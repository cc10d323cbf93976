pub mod auth;
pub mod jwt;

#[cfg(test)]
mod test;
