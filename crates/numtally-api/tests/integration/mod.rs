mod health;
mod middleware;
mod not_found;
mod sum_endpoint;
