mod helpers;
mod mocks;
