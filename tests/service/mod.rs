mod cascade;
mod inventory;
