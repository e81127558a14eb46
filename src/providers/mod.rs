pub mod route53;
