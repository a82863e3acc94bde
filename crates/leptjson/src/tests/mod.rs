mod property_number;
