/*!
 * Shell
 * Line-oriented command interface over the memory manager
 *
 * | Command | Arguments                          | Effect                  |
 * |---------|------------------------------------|-------------------------|
 * | `RQ`    | `<process_id> <size> <F\|B\|W>`     | request a block         |
 * | `RL`    | `<process_id>`                     | release first block     |
 * | `C`     |                                    | compact                 |
 * | `STAT`  |                                    | print the partition     |
 * | `X`     |                                    | leave the shell         |
 */

pub mod command;
pub mod executor;
pub mod report;

pub use command::{Command, CommandError, CommandResult};
pub use executor::{Flow, Shell};
