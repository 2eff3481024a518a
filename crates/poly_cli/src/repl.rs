use poly_engine::{PolyError, Polynomial};
use rustyline::error::ReadlineError;

use crate::completer::PolyHelper;
use crate::config::CliConfig;

pub struct Repl {
    config: CliConfig,
    slots: [Polynomial; 2],
}

impl Repl {
    pub fn new(config: CliConfig) -> Self {
        Self {
            config,
            slots: [Polynomial::new(), Polynomial::new()],
        }
    }

    pub fn run(&mut self) -> rustyline::Result<()> {
        println!("Polynomial workbench");
        println!("Two polynomial slots available: 1 and 2.");
        println!("Type 'help' for the command list.");

        let helper = PolyHelper::new();
        let config = rustyline::Config::builder()
            .max_history_size(self.config.history_size)?
            .completion_type(rustyline::CompletionType::List)
            .build();
        let mut rl =
            rustyline::Editor::<PolyHelper, rustyline::history::DefaultHistory>::with_config(
                config,
            )?;
        rl.set_helper(Some(helper));

        // History file path: ~/.poly_history
        let history_path = dirs::home_dir()
            .map(|p| p.join(".poly_history"))
            .unwrap_or_else(|| std::path::PathBuf::from(".poly_history"));

        // Load history if file exists (errors are silently ignored)
        let _ = rl.load_history(&history_path);

        loop {
            let readline = rl.readline("> ");
            match readline {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    rl.add_history_entry(line)?;

                    if line == "quit" || line == "exit" {
                        println!("Goodbye!");
                        break;
                    }

                    self.handle_command(line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history on exit (errors are silently ignored)
        let _ = rl.save_history(&history_path);

        Ok(())
    }

    fn handle_command(&mut self, line: &str) {
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match command {
            "insert" => self.cmd_insert(rest),
            "set" => self.cmd_set(rest),
            "show" => self.cmd_show(),
            "add" => self.cmd_binary("Sum", rest, Polynomial::add),
            "sub" => self.cmd_binary("Difference", rest, Polynomial::sub),
            "mul" => self.cmd_binary("Product", rest, Polynomial::mul),
            "eval" => self.cmd_eval(rest),
            "clear" => self.cmd_clear(rest),
            "config" => self.cmd_config(rest),
            "help" => print_help(),
            _ => println!("Unknown command '{}'. Type 'help' for the command list.", command),
        }
    }

    /// `insert <coefficient> <exponent> <1|2>`
    fn cmd_insert(&mut self, args: &str) {
        let Some((pair_part, slot_part)) = args.rsplit_once(char::is_whitespace) else {
            println!("Usage: insert <coefficient> <exponent> <1|2>");
            return;
        };
        let Some(slot) = slot_index(slot_part.trim()) else {
            println!("Target must be polynomial 1 or 2.");
            return;
        };
        match poly_parser::parse_term_pair(pair_part) {
            Ok((coeff, exp)) => {
                self.slots[slot].insert(coeff, exp);
                println!("P{}: {}", slot + 1, self.slots[slot]);
            }
            Err(e) => println!("{}", e),
        }
    }

    /// `set <1|2> <polynomial>` — replaces a slot with a parsed literal.
    fn cmd_set(&mut self, args: &str) {
        let Some((slot_part, poly_part)) = args.split_once(char::is_whitespace) else {
            println!("Usage: set <1|2> <polynomial>, e.g. set 1 3x^2 - 5x + 2");
            return;
        };
        let Some(slot) = slot_index(slot_part.trim()) else {
            println!("Target must be polynomial 1 or 2.");
            return;
        };
        match poly_parser::parse_polynomial(poly_part) {
            Ok(poly) => {
                self.slots[slot] = poly;
                println!("P{}: {}", slot + 1, self.slots[slot]);
            }
            Err(e) => println!("{}", e),
        }
    }

    fn cmd_show(&self) {
        println!("Polynomial 1: {}", self.slots[0]);
        println!("Polynomial 2: {}", self.slots[1]);
    }

    fn cmd_binary(
        &self,
        label: &str,
        args: &str,
        op: fn(&Polynomial, &Polynomial) -> Result<Polynomial, PolyError>,
    ) {
        if !args.is_empty() {
            println!("This operation takes no arguments; it always combines P1 and P2.");
        }
        if self.config.echo_operands {
            self.cmd_show();
        }
        match op(&self.slots[0], &self.slots[1]) {
            Ok(result) => println!("{}: {}", label, result),
            // Reported, not fatal; the session continues.
            Err(e) => println!("{}", e),
        }
    }

    /// `eval <1|2> <x>`
    fn cmd_eval(&self, args: &str) {
        let Some((slot_part, x_part)) = args.split_once(char::is_whitespace) else {
            println!("Usage: eval <1|2> <x>");
            return;
        };
        let Some(slot) = slot_index(slot_part.trim()) else {
            println!("Target must be polynomial 1 or 2.");
            return;
        };
        match x_part.trim().parse::<f64>() {
            Ok(x) => println!("Result: {}", self.slots[slot].evaluate(x)),
            Err(_) => println!("'{}' is not a number.", x_part.trim()),
        }
    }

    /// `config [show|save|restore|enable <field>|disable <field>]`
    fn cmd_config(&mut self, args: &str) {
        let mut parts = args.split_whitespace();
        match parts.next() {
            Some("show") | None => {
                println!("Configuration:");
                println!("  history_size: {}", self.config.history_size);
                println!("  echo_operands: {}", self.config.echo_operands);
            }
            Some("save") => match self.config.save() {
                Ok(_) => println!("Configuration saved to poly_config.toml"),
                Err(e) => println!("Error saving configuration: {}", e),
            },
            Some("restore") => {
                self.config = CliConfig::restore();
                println!("Configuration restored to defaults.");
            }
            Some(mode @ "enable") | Some(mode @ "disable") => match parts.next() {
                Some("echo_operands") => {
                    self.config.echo_operands = mode == "enable";
                    println!("  echo_operands: {}", self.config.echo_operands);
                }
                _ => println!("Usage: config {} echo_operands", mode),
            },
            Some(other) => {
                println!("Unknown config subcommand '{}'. Try show, save, or restore.", other)
            }
        }
    }

    /// `clear <1|2>`
    fn cmd_clear(&mut self, args: &str) {
        let Some(slot) = slot_index(args.trim()) else {
            println!("Usage: clear <1|2>");
            return;
        };
        self.slots[slot] = Polynomial::new();
        println!("P{} cleared.", slot + 1);
    }
}

fn slot_index(arg: &str) -> Option<usize> {
    match arg {
        "1" => Some(0),
        "2" => Some(1),
        _ => None,
    }
}

fn print_help() {
    println!("Commands:");
    println!("  insert <coeff> <exp> <1|2>   insert a term into a polynomial");
    println!("  set <1|2> <polynomial>       replace a slot, e.g. set 1 3x^2 - 5x + 2");
    println!("  show                         display both polynomials");
    println!("  add | sub | mul              combine P1 and P2");
    println!("  eval <1|2> <x>               evaluate a polynomial at x");
    println!("  clear <1|2>                  reset a slot to zero");
    println!("  config [show|save|restore]   inspect or persist settings");
    println!("  help                         this list");
    println!("  quit | exit                  leave the shell");
}
