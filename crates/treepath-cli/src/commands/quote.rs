use treepath_lib::quote;

pub struct QuoteArgs {
    pub text: String,
}

pub fn run(args: QuoteArgs) {
    println!("{}", quote(&args.text));
}
