pub mod derive;
pub mod ledger;
pub mod rates;
pub mod seeder;
pub mod wizard;
