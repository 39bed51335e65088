mod catways;
mod helpers;
mod logout;
mod root;
mod users;
