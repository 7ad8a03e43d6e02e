pub mod exercise;
pub mod user;

/*
 A user is a single document: the exercise log lives inline in the user row as a JSON
 array. Entries have no id of their own, only their position in the log.
 */
