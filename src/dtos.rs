pub mod admindtos;
pub mod developerdtos;
pub mod propertydtos;
pub mod taskdtos;
pub mod testdtos;
pub mod userdtos;
