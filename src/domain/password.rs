use crate::validation::is_valid_password;

#[derive(PartialEq, Debug, Clone)]
pub struct Password(String);

impl Password {
    pub fn parse(password: String) -> Result<Password, String> {
        match is_valid_password(&password) {
            true => Ok(Password(password)),
            false => Err("Password does not meet the requirements".to_owned()),
        }
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
