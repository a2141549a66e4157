use dice_expr::DiceExpression;
use std::io::{self, BufRead, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let seed = args.next().ok_or("--seed requires a value")?.parse()?;
                dice_expr::reseed(seed);
            }
            other => return Err(format!("unrecognized argument: {}", other).into()),
        }
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(Ok(line)) = lines.next() {
        if !line.trim().is_empty() {
            match DiceExpression::new(&line) {
                Ok(expr) => {
                    let rolled = expr.roll_breakdown();
                    println!("{} = {} {:?}", expr, rolled.roll, rolled.dice);
                    println!("  min {}, max {}", expr.min(), expr.max());
                }
                Err(why) => eprintln!("Error: {}", why),
            }
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
