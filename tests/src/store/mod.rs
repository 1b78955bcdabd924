mod parents;
