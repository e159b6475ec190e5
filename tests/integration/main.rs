mod helpers;
mod input_flow;
mod slash_commands;
