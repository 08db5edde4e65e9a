
#[cfg(test)]
mod reset_schema_tests;

#[cfg(test)]
mod form_submit_tests;
