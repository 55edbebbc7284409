mod checker;
mod stress;
