mod artist;
mod issue;
mod series;
