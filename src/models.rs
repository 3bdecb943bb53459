pub mod developermodel;
pub mod propertymodel;
pub mod taskmodel;
pub mod testmodel;
pub mod usermodel;
