use crate::content;
use crate::exceptions::DrynessError;

pub fn about() -> Result<(), DrynessError> {
    content::show_about();
    Ok(())
}

pub fn facts() -> Result<(), DrynessError> {
    content::show_facts();
    Ok(())
}
