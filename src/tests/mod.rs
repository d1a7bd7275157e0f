mod test_divisor;
